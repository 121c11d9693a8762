use crate::ExportError;

/// Somewhere a text file can be handed to the user.
///
/// Targets offer two paths: a regular save under a file name, and an inline
/// open of a `data:` URI used when saving is not possible. The export side
/// effect in `leadform` tries them in that order.
pub trait ExportTarget {
    /// Save `contents` as a file called `file_name`.
    fn save(&self, file_name: &str, contents: &str) -> Result<(), ExportError>;

    /// Present an already encoded `data:` URI without a file name.
    fn open_inline(&self, data_uri: &str) -> Result<(), ExportError>;
}

impl<T: ExportTarget + ?Sized> ExportTarget for &T {
    fn save(&self, file_name: &str, contents: &str) -> Result<(), ExportError> {
        (**self).save(file_name, contents)
    }

    fn open_inline(&self, data_uri: &str) -> Result<(), ExportError> {
        (**self).open_inline(data_uri)
    }
}

impl<T: ExportTarget + ?Sized> ExportTarget for Box<T> {
    fn save(&self, file_name: &str, contents: &str) -> Result<(), ExportError> {
        (**self).save(file_name, contents)
    }

    fn open_inline(&self, data_uri: &str) -> Result<(), ExportError> {
        (**self).open_inline(data_uri)
    }
}
