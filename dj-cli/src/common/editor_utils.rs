use std::{io, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> io::Result<()> {
    let status = Command::new(editor_cmd).arg(path).status()?;
    if !status.success() {
        return Err(io::Error::other(format!(
            "{editor_cmd} exited with status {status}"
        )));
    }
    Ok(())
}
