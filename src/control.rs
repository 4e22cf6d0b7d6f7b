//! Live parameter control.
//!
//! The render loop owns a [`ParamHandle`] and takes one [`snapshot`] per
//! frame. Controllers (the preset watcher thread, CLI setup) write through
//! clones of the same handle; writes become visible at the next snapshot,
//! never halfway through a pass.
//!
//! [`snapshot`]: ParamHandle::snapshot

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::color::Rgb;
use crate::error::Result;
use crate::params::WaveParams;

/// Shared, validated wave parameters
#[derive(Clone, Debug, Default)]
pub struct ParamHandle {
    inner: Arc<Mutex<WaveParams>>,
}

impl ParamHandle {
    /// Create a handle; `params` is validated first
    pub fn new(params: WaveParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            inner: Arc::new(Mutex::new(params)),
        })
    }

    // Writes replace the whole value, so a poisoned lock still holds a complete set
    fn lock(&self) -> MutexGuard<'_, WaveParams> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current set, for one frame
    pub fn snapshot(&self) -> WaveParams {
        *self.lock()
    }

    /// Replace the whole set; invalid sets are rejected and the old one kept
    pub fn replace(&self, params: WaveParams) -> Result<()> {
        params.validate()?;
        *self.lock() = params;
        Ok(())
    }

    /// Edit a copy of the current set and commit it if still valid
    pub fn update(&self, edit: impl FnOnce(&mut WaveParams)) -> Result<()> {
        let mut guard = self.lock();
        let mut next = *guard;
        edit(&mut next);
        next.validate()?;
        *guard = next;
        Ok(())
    }
}

/// Command-line values layered on top of every loaded preset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParamOverrides {
    pub iterations: Option<u32>,
    pub depth_color: Option<Rgb>,
    pub surface_color: Option<Rgb>,
}

impl ParamOverrides {
    pub fn apply(&self, params: &mut WaveParams) {
        if let Some(iterations) = self.iterations {
            params.small_wave.iterations = iterations;
        }
        if let Some(color) = self.depth_color {
            params.color.depth_color = color;
        }
        if let Some(color) = self.surface_color {
            params.color.surface_color = color;
        }
    }
}

/// Modification time and length, so same-mtime rewrites are still seen
type FileStamp = (SystemTime, u64);

fn file_stamp(path: &Path) -> Result<FileStamp> {
    let metadata = std::fs::metadata(path)?;
    Ok((metadata.modified()?, metadata.len()))
}

/// Reloads a JSON preset whenever the file changes
#[derive(Debug)]
pub struct ParamFileWatcher {
    path: PathBuf,
    overrides: ParamOverrides,
    last_stamp: Option<FileStamp>,
    retry: bool,
}

impl ParamFileWatcher {
    /// Watch `path`; the file as it is now counts as already applied
    pub fn new(path: impl Into<PathBuf>, overrides: ParamOverrides) -> Self {
        let path = path.into();
        let last_stamp = file_stamp(&path).ok();
        Self {
            path,
            overrides,
            last_stamp,
            retry: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the file once
    ///
    /// Returns `Ok(true)` if a new preset was applied. A changed file that
    /// fails to load is reported once, then retried quietly on every poll
    /// until it loads or changes again.
    pub fn poll(&mut self, handle: &ParamHandle) -> Result<bool> {
        let stamp = file_stamp(&self.path)?;
        let changed = self.last_stamp != Some(stamp);
        if !changed && !self.retry {
            return Ok(false);
        }
        self.last_stamp = Some(stamp);

        match self.apply(handle) {
            Ok(()) => {
                self.retry = false;
                Ok(true)
            }
            Err(_) if !changed => Ok(false),
            Err(e) => {
                self.retry = true;
                Err(e)
            }
        }
    }

    fn apply(&self, handle: &ParamHandle) -> Result<()> {
        let mut params = WaveParams::load(&self.path)?;
        self.overrides.apply(&mut params);
        handle.replace(params)
    }
}

/// Spawn preset hot-reload thread
pub fn spawn_param_watcher(
    path: PathBuf,
    interval: Duration,
    handle: ParamHandle,
    overrides: ParamOverrides,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut watcher = ParamFileWatcher::new(path, overrides);

        loop {
            match watcher.poll(&handle) {
                Ok(true) => log::info!("Reloaded parameters from {}", watcher.path().display()),
                Ok(false) => {}
                Err(e) => log::warn!(
                    "Keeping previous parameters, {} rejected: {}",
                    watcher.path().display(),
                    e
                ),
            }

            thread::sleep(interval);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_snapshot_is_detached_copy() {
        let handle = ParamHandle::new(WaveParams::default()).unwrap();
        let frame = handle.snapshot();

        handle.update(|p| p.big_wave.elevation = 0.9).unwrap();

        assert_eq!(frame.big_wave.elevation, 0.2);
        assert_eq!(handle.snapshot().big_wave.elevation, 0.9);
    }

    #[test]
    fn test_invalid_update_keeps_previous_set() {
        let handle = ParamHandle::new(WaveParams::default()).unwrap();

        let result = handle.update(|p| {
            p.big_wave.elevation = 0.5;
            p.small_wave.frequency = -3.0;
        });

        assert!(matches!(result, Err(Error::InvalidParameter(_))));
        assert_eq!(handle.snapshot(), WaveParams::default());
    }

    #[test]
    fn test_new_rejects_invalid_set() {
        let mut params = WaveParams::default();
        params.color.opacity = 2.0;
        assert!(ParamHandle::new(params).is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = ParamHandle::new(WaveParams::default()).unwrap();
        let controller = handle.clone();

        controller.replace(WaveParams::calm()).unwrap();
        assert_eq!(handle.snapshot(), WaveParams::calm());
    }

    fn write_preset(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("preset.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_watcher_skips_file_present_at_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset(&dir, r#"{ "small_wave": { "iterations": 2 } }"#);

        let handle = ParamHandle::default();
        let mut watcher = ParamFileWatcher::new(&path, ParamOverrides::default());

        assert!(!watcher.poll(&handle).unwrap());
        assert_eq!(handle.snapshot(), WaveParams::default());

        std::fs::write(&path, r#"{ "small_wave": { "iterations": 12 } }"#).unwrap();
        assert!(watcher.poll(&handle).unwrap());
        assert_eq!(handle.snapshot().small_wave.iterations, 12);

        // Unchanged file is not reloaded
        assert!(!watcher.poll(&handle).unwrap());
    }

    #[test]
    fn test_overrides_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset(&dir, r#"{ "small_wave": { "iterations": 1 } }"#);
        let overrides = ParamOverrides {
            iterations: Some(3),
            depth_color: Some(Rgb::BLACK),
            ..Default::default()
        };

        let mut params = WaveParams::load(&path).unwrap();
        overrides.apply(&mut params);
        let handle = ParamHandle::new(params).unwrap();
        let mut watcher = ParamFileWatcher::new(&path, overrides);

        assert!(!watcher.poll(&handle).unwrap());
        assert_eq!(handle.snapshot().small_wave.iterations, 3);

        std::fs::write(&path, r#"{ "small_wave": { "iterations": 1, "elevation": 0.3 } }"#)
            .unwrap();
        assert!(watcher.poll(&handle).unwrap());

        let reloaded = handle.snapshot();
        assert_eq!(reloaded.small_wave.iterations, 3);
        assert_eq!(reloaded.small_wave.elevation, 0.3);
        assert_eq!(reloaded.color.depth_color, Rgb::BLACK);
    }

    #[test]
    fn test_watcher_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset(&dir, "{}");

        let handle = ParamHandle::default();
        let mut watcher = ParamFileWatcher::new(&path, ParamOverrides::default());

        std::fs::write(&path, r#"{ "big_wave": { "speed": -1.0 } }"#).unwrap();
        assert!(watcher.poll(&handle).is_err());
        assert_eq!(handle.snapshot(), WaveParams::default());

        // Reported once, then retried quietly
        assert!(!watcher.poll(&handle).unwrap());
    }

    #[test]
    fn test_half_written_file_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset(&dir, "{}");

        let handle = ParamHandle::default();
        let mut watcher = ParamFileWatcher::new(&path, ParamOverrides::default());

        // Same length as the finished file below
        std::fs::write(&path, r#"{"small_wave":{"iterations":   "#).unwrap();
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert!(matches!(watcher.poll(&handle), Err(Error::Json(_))));

        // Finished write lands within the same mtime tick
        std::fs::write(&path, r#"{"small_wave":{"iterations":5}}"#).unwrap();
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(modified).unwrap();
        drop(file);

        assert!(watcher.poll(&handle).unwrap());
        assert_eq!(handle.snapshot().small_wave.iterations, 5);
    }

    #[test]
    fn test_watcher_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher =
            ParamFileWatcher::new(dir.path().join("missing.json"), ParamOverrides::default());

        assert!(matches!(
            watcher.poll(&ParamHandle::default()),
            Err(Error::Io(_))
        ));
    }
}
