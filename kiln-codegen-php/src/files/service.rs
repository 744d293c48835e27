use std::path::{Path, PathBuf};

use kiln_core::GeneratedFile;

use super::{
    Artifact, ArtifactContext, SERVICE_NAMESPACE, ServiceInterfaceArtifact,
    service_interface::ServiceDeclarations,
};
use crate::{
    PhpFile,
    ast::{Method, Param, UseRegistry, Visibility},
};

const INJECT: &str = "Dot\\DependencyInjection\\Attribute\\Inject";

/// The module's service implementation: `{Name}Service`.
///
/// Implements every operation of [`ServiceInterfaceArtifact`] on top of an
/// injected repository.
#[derive(Debug, Clone)]
pub struct ServiceArtifact {
    pub ctx: ArtifactContext,
    pub name: String,
}

impl ServiceArtifact {
    pub fn new(ctx: ArtifactContext, name: impl Into<String>) -> Self {
        Self {
            ctx,
            name: name.into(),
        }
    }

    fn interface(&self) -> ServiceInterfaceArtifact {
        ServiceInterfaceArtifact::new(self.ctx.clone(), self.name.clone())
    }

    fn build(&self) -> PhpFile {
        let mut uses = UseRegistry::for_type(self.class_name());
        let decls = ServiceDeclarations::new(&self.ctx, &self.name, &mut uses);
        let inject = uses.add_class(INJECT).to_string();

        let ctor = Method::constructor()
            .attribute(format!("{}({}::class)", inject, decls.repository))
            .param(Param::typed("repository", &decls.repository).promoted(Visibility::Protected));
        let delete_body = format!("$this->repository->deleteResource(${});", decls.variable);

        PhpFile::class(self.namespace(), self.class_name())
            .strict_types(self.ctx.strict_types)
            .implements(self.interface().class_name())
            .uses(uses)
            .add_method(ctor)
            .add_method(
                Method::from_declaration(decls.get_repository)
                    .body_line("return $this->repository;"),
            )
            .add_method(
                Method::from_declaration(decls.find)
                    .body_line("return $this->repository->find($id);"),
            )
            .add_method(Method::from_declaration(decls.delete).body_line(delete_body))
    }
}

impl Artifact for ServiceArtifact {
    fn class_name(&self) -> String {
        format!("{}Service", self.name)
    }

    fn namespace(&self) -> String {
        self.ctx.namespace(SERVICE_NAMESPACE)
    }
}

impl GeneratedFile for ServiceArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        self.ctx.path(base, SERVICE_NAMESPACE, &self.class_name())
    }

    fn render(&self) -> String {
        self.build().render()
    }
}
