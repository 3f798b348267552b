use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};

use crate::error::DemoError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with `#import` support.
///
/// Pre-loads the shared WGSL modules at construction time. Demo shaders use
/// `#import demo::transform` and `#import demo::lighting` to pull in the
/// uniform declarations.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition.
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/transform.wgsl"),
        file_path: "modules/transform.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/lighting.wgsl"),
        file_path: "modules/lighting.wgsl",
    },
];

impl ShaderComposer {
    /// Composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// [`DemoError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, DemoError> {
        let mut composer = Composer::default();
        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    DemoError::Shader(format!(
                        "failed to register shader module '{}': {e:?}",
                        m.file_path
                    ))
                })?;
        }
        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// [`DemoError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, DemoError> {
        let naga_module = self
            .compose_naga(source, file_path)
            .map_err(|e| DemoError::Shader(format!("failed to compose '{file_path}': {e}")))?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu shader module.
    /// Useful for testing shader composition without a GPU device.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, Box<naga_oil::compose::ComposerError>> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ShaderKind;

    const ALL: [ShaderKind; 4] = [
        ShaderKind::Colour,
        ShaderKind::VertexColour,
        ShaderKind::Phong,
        ShaderKind::Checker,
    ];

    #[test]
    fn test_all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for kind in ALL {
            let (source, file_path) = kind.source();
            let _ = composer
                .compose_naga(source, file_path)
                .unwrap_or_else(|e| panic!("Shader '{file_path}' failed to compose: {e}"));
        }
    }

    #[test]
    fn shaders_declare_both_entry_points() {
        let mut composer = ShaderComposer::new().unwrap();
        for kind in ALL {
            let (source, file_path) = kind.source();
            let module = composer.compose_naga(source, file_path).unwrap();
            let names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
            assert!(names.contains(&"vs_main"), "{file_path}: {names:?}");
            assert!(names.contains(&"fs_main"), "{file_path}: {names:?}");
        }
    }
}
