//! Placeholder image generator for Flowlab.
//!
//! [`NoiseImageGenerator`] stands in for a real fluid-flow model: every call
//! writes a PNG of uniform RGB noise under a fixed output directory and
//! returns its path. Pure synchronous; no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use flowlab_artifact::NoiseImageGenerator;
//! use flowlab_core::artifact::ArtifactGenerator;
//!
//! let generator = NoiseImageGenerator::new("outputs");
//! let path = generator.generate("Re=1000").unwrap();
//! println!("wrote {path}");
//! ```

pub mod error;

use std::{
  fs::{self, File},
  io::BufWriter,
  path::{Path, PathBuf},
};

pub use error::{Error, Result};
use flowlab_core::artifact::ArtifactGenerator;
use rand::Rng as _;
use uuid::Uuid;

/// Edge length of generated images, in pixels.
pub const DEFAULT_SIZE: u32 = 64;

/// Writes random-noise PNGs named `<uuid>.png` into `output_dir`.
#[derive(Debug, Clone)]
pub struct NoiseImageGenerator {
  output_dir: PathBuf,
  width:      u32,
  height:     u32,
}

impl NoiseImageGenerator {
  /// A generator producing 64×64 images under `output_dir`.
  ///
  /// The directory is created lazily on the first call to `generate`.
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
      width:      DEFAULT_SIZE,
      height:     DEFAULT_SIZE,
    }
  }

  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn output_dir(&self) -> &Path { &self.output_dir }

  fn write_noise(&self, path: &Path) -> Result<()> {
    let mut pixels = vec![0u8; self.width as usize * self.height as usize * 3];
    rand::thread_rng().fill(&mut pixels[..]);

    let file = BufWriter::new(File::create_new(path)?);
    let mut encoder = png::Encoder::new(file, self.width, self.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    Ok(())
  }
}

impl ArtifactGenerator for NoiseImageGenerator {
  type Error = Error;

  /// The input is ignored; only the unique output path matters.
  fn generate(&self, _input: &str) -> Result<String> {
    fs::create_dir_all(&self.output_dir)?;

    let path = self.output_dir.join(format!("{}.png", Uuid::new_v4()));
    self.write_noise(&path)?;

    tracing::debug!(path = %path.display(), "wrote noise artifact");
    Ok(path.to_string_lossy().into_owned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dimensions(path: &str) -> (u32, u32) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height)
  }

  #[test]
  fn generate_writes_png_under_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NoiseImageGenerator::new(dir.path());

    let path = generator.generate("Re=1000").unwrap();

    assert!(Path::new(&path).starts_with(dir.path()));
    assert!(path.ends_with(".png"), "path: {path}");
    assert_eq!(dimensions(&path), (64, 64));
  }

  #[test]
  fn every_call_gets_a_fresh_path() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NoiseImageGenerator::new(dir.path());

    let a = generator.generate("same input").unwrap();
    let b = generator.generate("same input").unwrap();

    assert_ne!(a, b);
    assert!(Path::new(&a).exists());
    assert!(Path::new(&b).exists());
  }

  #[test]
  fn missing_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("runs").join("today");
    let generator = NoiseImageGenerator::new(&nested);

    let path = generator.generate("").unwrap();

    assert!(nested.is_dir());
    assert!(Path::new(&path).is_file());
  }

  #[test]
  fn custom_size_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NoiseImageGenerator::new(dir.path()).with_size(16, 8);

    let path = generator.generate("x").unwrap();
    assert_eq!(dimensions(&path), (16, 8));
  }

  #[test]
  fn unwritable_output_dir_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"occupied").unwrap();

    let err = NoiseImageGenerator::new(&blocker).generate("x").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
  }
}
