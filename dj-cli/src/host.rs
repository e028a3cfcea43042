use crate::common::open_file_in_editor;
use dj_core::{FileStore, Vault};
use std::io;

/// The filesystem vault, with entries opened in the user's editor.
pub struct EditorVault<'a> {
    vault: &'a Vault,
    editor: String,
}

impl<'a> EditorVault<'a> {
    pub fn new(vault: &'a Vault, editor: String) -> Self {
        Self { vault, editor }
    }
}

impl FileStore for EditorVault<'_> {
    fn exists(&self, path: &str) -> io::Result<bool> {
        self.vault.exists(path)
    }

    fn create_folder(&self, path: &str) -> io::Result<()> {
        self.vault.create_folder(path)
    }

    fn create_file(&self, path: &str, content: &str) -> io::Result<()> {
        self.vault.create_file(path, content)
    }

    fn open_file(&self, path: &str) -> io::Result<()> {
        let file = self.vault.resolve(path);
        if !file.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a file", file.display()),
            ));
        }
        open_file_in_editor(&self.editor, &file)
    }
}
