//! Name-keyed shader and texture registries
//!
//! The libraries only record where assets live; compiling shaders and
//! decoding images is the viewer's job. They are passed around
//! explicitly so scenes can be built against a fixed set of names.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(u32);

impl ShaderHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(u32);

impl TextureHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    pub name: String,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSource {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    programs: Vec<ShaderProgram>,
    by_name: HashMap<String, ShaderHandle>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex/fragment pair under `name`
    pub fn add(
        &mut self,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
        name: &str,
    ) -> Result<ShaderHandle, AssetError> {
        if self.by_name.contains_key(name) {
            return Err(AssetError::DuplicateShader(name.to_string()));
        }
        let handle = ShaderHandle(self.programs.len() as u32);
        self.programs.push(ShaderProgram {
            name: name.to_string(),
            vertex: vertex.as_ref().to_path_buf(),
            fragment: fragment.as_ref().to_path_buf(),
        });
        self.by_name.insert(name.to_string(), handle);
        debug!("shader `{}` registered as {:?}", name, handle);
        Ok(handle)
    }

    pub fn get(&self, name: &str) -> Result<ShaderHandle, AssetError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownShader(name.to_string()))
    }

    pub fn program(&self, handle: ShaderHandle) -> Option<&ShaderProgram> {
        self.programs.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShaderHandle, &ShaderProgram)> {
        self.programs
            .iter()
            .enumerate()
            .map(|(i, program)| (ShaderHandle(i as u32), program))
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextureLibrary {
    sources: Vec<TextureSource>,
    by_name: HashMap<String, TextureHandle>,
}

impl TextureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl AsRef<Path>, name: &str) -> Result<TextureHandle, AssetError> {
        if self.by_name.contains_key(name) {
            return Err(AssetError::DuplicateTexture(name.to_string()));
        }
        let handle = TextureHandle(self.sources.len() as u32);
        self.sources.push(TextureSource {
            name: name.to_string(),
            path: path.as_ref().to_path_buf(),
        });
        self.by_name.insert(name.to_string(), handle);
        debug!("texture `{}` registered as {:?}", name, handle);
        Ok(handle)
    }

    pub fn get(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownTexture(name.to_string()))
    }

    pub fn source(&self, handle: TextureHandle) -> Option<&TextureSource> {
        self.sources.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureHandle, &TextureSource)> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| (TextureHandle(i as u32), source))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Everything a scene may look up by name while populating
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    pub shaders: ShaderLibrary,
    pub textures: TextureLibrary,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}
