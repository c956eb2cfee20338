use std::path::{Path, PathBuf};

use log::debug;

/// Files offered by a drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropInfo {
    pub paths: Vec<PathBuf>,
}

impl DropInfo {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), allow(dead_code))]
pub enum DragOperation {
    None,
    Generic,
    Copy,
    Move,
    Link,
}

/// Receives the events of a [`DropZone`].
///
/// Only `perform_drop` is mandatory. Hooks returning `None` are treated as
/// not implemented and the zone answers by itself.
pub trait DropDelegate {
    fn dragging_entered(&mut self, _info: &DropInfo) -> Option<DragOperation> {
        None
    }

    fn dragging_updated(&mut self, _info: &DropInfo) -> Option<DragOperation> {
        None
    }

    fn dragging_exited(&mut self, _info: &DropInfo) {}

    fn prepare_for_drop(&mut self, _info: &DropInfo) -> Option<bool> {
        None
    }

    fn perform_drop(&mut self, info: &DropInfo) -> bool;
}

/// Accepts dropped files by extension and forwards drag events to a delegate.
pub struct DropZone<D> {
    accepted_extensions: Vec<String>,
    pub default_operation: DragOperation,
    delegate: Option<D>,
}

impl<D> Default for DropZone<D> {
    fn default() -> Self {
        Self {
            accepted_extensions: Vec::new(),
            default_operation: DragOperation::Copy,
            delegate: None,
        }
    }
}

impl<D: DropDelegate> DropZone<D> {
    pub fn with_delegate(delegate: D) -> Self {
        Self {
            delegate: Some(delegate),
            ..Self::default()
        }
    }

    /// Replaces the accepted extensions, e.g. `["bmp", "png"]`.
    pub fn register_extensions(&mut self, extensions: &[&str]) {
        self.accepted_extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        debug!("Drop zone accepts {:?}", self.accepted_extensions);
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.accepted_extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    pub fn has_valid_files(&self, info: &DropInfo) -> bool {
        info.paths.iter().any(|path| self.accepts(path))
    }

    pub fn delegate(&self) -> Option<&D> {
        self.delegate.as_ref()
    }

    fn fallback_operation(&self, info: &DropInfo) -> DragOperation {
        if self.has_valid_files(info) {
            self.default_operation
        } else {
            DragOperation::Generic
        }
    }

    pub fn dragging_entered(&mut self, info: &DropInfo) -> DragOperation {
        match self.delegate.as_mut().and_then(|d| d.dragging_entered(info)) {
            Some(operation) => operation,
            None => self.fallback_operation(info),
        }
    }

    pub fn dragging_updated(&mut self, info: &DropInfo) -> DragOperation {
        match self.delegate.as_mut().and_then(|d| d.dragging_updated(info)) {
            Some(operation) => operation,
            None => self.fallback_operation(info),
        }
    }

    pub fn dragging_exited(&mut self, info: &DropInfo) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.dragging_exited(info);
        }
    }

    pub fn prepare_for_drop(&mut self, info: &DropInfo) -> bool {
        self.delegate
            .as_mut()
            .and_then(|d| d.prepare_for_drop(info))
            .unwrap_or(true)
    }

    pub fn perform_drop(&mut self, info: &DropInfo) -> bool {
        match self.delegate.as_mut() {
            Some(delegate) => delegate.perform_drop(info),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Minimal {
        dropped: Vec<PathBuf>,
    }

    impl DropDelegate for Minimal {
        fn perform_drop(&mut self, info: &DropInfo) -> bool {
            self.dropped.extend(info.paths.iter().cloned());
            true
        }
    }

    #[derive(Default)]
    struct Full {
        exited: usize,
    }

    impl DropDelegate for Full {
        fn dragging_entered(&mut self, _info: &DropInfo) -> Option<DragOperation> {
            Some(DragOperation::Link)
        }

        fn dragging_updated(&mut self, _info: &DropInfo) -> Option<DragOperation> {
            Some(DragOperation::Move)
        }

        fn dragging_exited(&mut self, _info: &DropInfo) {
            self.exited += 1;
        }

        fn prepare_for_drop(&mut self, _info: &DropInfo) -> Option<bool> {
            Some(false)
        }

        fn perform_drop(&mut self, _info: &DropInfo) -> bool {
            false
        }
    }

    fn info(paths: &[&str]) -> DropInfo {
        DropInfo::new(paths.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn test_extension_filter() {
        let mut zone = DropZone::<Minimal>::default();
        zone.register_extensions(&["bmp", ".PNG"]);
        assert!(zone.accepts(Path::new("logo.bmp")));
        assert!(zone.accepts(Path::new("logo.BMP")));
        assert!(zone.accepts(Path::new("dir/logo.png")));
        assert!(!zone.accepts(Path::new("logo.jpg")));
        assert!(!zone.accepts(Path::new("bmp")));
        assert!(zone.has_valid_files(&info(&["a.txt", "b.bmp"])));
        assert!(!zone.has_valid_files(&info(&[])));
    }

    #[test]
    fn test_fallback_without_hooks() {
        let mut zone = DropZone::with_delegate(Minimal::default());
        zone.register_extensions(&["bmp"]);
        assert_eq!(zone.dragging_entered(&info(&["a.bmp"])), DragOperation::Copy);
        assert_eq!(zone.dragging_updated(&info(&["a.txt"])), DragOperation::Generic);

        zone.default_operation = DragOperation::Move;
        assert_eq!(zone.dragging_updated(&info(&["a.bmp"])), DragOperation::Move);

        assert!(zone.prepare_for_drop(&info(&["a.bmp"])));
        assert!(zone.perform_drop(&info(&["a.bmp", "b.txt"])));
        assert_eq!(zone.delegate().unwrap().dropped, vec![PathBuf::from("a.bmp"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_hooks_are_forwarded() {
        let mut zone = DropZone::with_delegate(Full::default());
        zone.register_extensions(&["bmp"]);
        let session = info(&["a.txt"]);
        assert_eq!(zone.dragging_entered(&session), DragOperation::Link);
        assert_eq!(zone.dragging_updated(&session), DragOperation::Move);
        assert!(!zone.prepare_for_drop(&session));
        assert!(!zone.perform_drop(&session));
        zone.dragging_exited(&session);
        assert_eq!(zone.delegate().unwrap().exited, 1);
    }

    #[test]
    fn test_without_delegate() {
        let mut zone = DropZone::<Minimal>::default();
        zone.register_extensions(&["bmp"]);
        assert_eq!(zone.dragging_entered(&info(&["x.bmp"])), DragOperation::Copy);
        assert!(zone.prepare_for_drop(&info(&["x.bmp"])));
        assert!(zone.perform_drop(&info(&["x.bmp"])));
        zone.dragging_exited(&info(&["x.bmp"]));
        assert!(zone.delegate().is_none());
    }
}
