use std::path::{Path, PathBuf};

use kiln_core::GeneratedFile;

use super::{
    Artifact, ArtifactContext, ENTITY_NAMESPACE, REPOSITORY_NAMESPACE, SERVICE_NAMESPACE,
};
use crate::{
    PhpFile,
    ast::{Declaration, Param, UseRegistry},
    naming::PHP_NAMING,
};

/// The contract of a module's service: `{Name}ServiceInterface`.
#[derive(Debug, Clone)]
pub struct ServiceInterfaceArtifact {
    pub ctx: ArtifactContext,
    pub name: String,
}

impl ServiceInterfaceArtifact {
    pub fn new(ctx: ArtifactContext, name: impl Into<String>) -> Self {
        Self {
            ctx,
            name: name.into(),
        }
    }

    fn build(&self) -> PhpFile {
        let mut uses = UseRegistry::for_type(self.class_name());
        let decls = ServiceDeclarations::new(&self.ctx, &self.name, &mut uses);

        PhpFile::interface(self.namespace(), self.class_name())
            .strict_types(self.ctx.strict_types)
            .uses(uses)
            .add_all(decls.into_vec())
    }
}

impl Artifact for ServiceInterfaceArtifact {
    fn class_name(&self) -> String {
        format!("{}ServiceInterface", self.name)
    }

    fn namespace(&self) -> String {
        self.ctx.namespace(SERVICE_NAMESPACE)
    }
}

impl GeneratedFile for ServiceInterfaceArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        self.ctx.path(base, SERVICE_NAMESPACE, &self.class_name())
    }

    fn render(&self) -> String {
        self.build().render()
    }
}

/// The service operations shared by the interface and its implementation.
pub(crate) struct ServiceDeclarations {
    /// Alias of the repository class
    pub repository: String,
    /// Variable name of the entity parameter
    pub variable: String,
    pub get_repository: Declaration,
    pub find: Declaration,
    pub delete: Declaration,
}

impl ServiceDeclarations {
    /// Build the declarations, importing the entity and repository into
    /// `uses` and referring to them by the alias the registry hands out.
    pub fn new(ctx: &ArtifactContext, name: &str, uses: &mut UseRegistry) -> Self {
        let entity = uses
            .add_class(ctx.fqcn(ENTITY_NAMESPACE, name))
            .to_string();
        let repository = uses
            .add_class(ctx.fqcn(REPOSITORY_NAMESPACE, &format!("{}Repository", name)))
            .to_string();
        let mut variable = PHP_NAMING.variable_name(name);
        // `$this` cannot be a parameter
        if variable == "this" {
            variable.push_str("Entity");
        }

        Self {
            get_repository: Declaration::new("getRepository").returns(repository.clone()),
            find: Declaration::new(format!("find{}", name))
                .param(Param::typed("id", "int"))
                .returns(entity.clone())
                .nullable(true),
            delete: Declaration::new(format!("delete{}", name))
                .param(Param::typed(variable.clone(), entity))
                .returns("void"),
            repository,
            variable,
        }
    }

    /// The declarations in declaration order.
    pub fn into_vec(self) -> Vec<Declaration> {
        vec![self.get_repository, self.find, self.delete]
    }
}
