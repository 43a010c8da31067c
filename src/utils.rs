use anyhow::Context;
use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

/// Helper function to read a file that logs the path of the file in case of an error.
pub fn read_file(path: &Path) -> Result<Vec<u8>, anyhow::Error> {
    let mut buffer = Vec::new();
    let mut file = open_file(path)?;
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Helper function to open a file that logs the path of the file in case of an error.
pub fn open_file(path: &Path) -> Result<File, anyhow::Error> {
    let file = File::open(path).context(format!("Can't open file at {}", path.display()))?;
    Ok(file)
}

/// Helper function to create a file that logs the path of the file in case of an error.
pub fn create_file(path: &Path) -> Result<File, anyhow::Error> {
    let file = File::create(path).context(format!("Can't create file at {}", path.display()))?;
    Ok(file)
}

/// Helper function to rename a file that logs both paths in case of an error.
pub fn rename_file(from: &Path, to: &Path) -> Result<(), anyhow::Error> {
    fs::rename(from, to).context(format!(
        "Can't rename file from {} to {}",
        from.display(),
        to.display()
    ))
}

/// Helper function to remove a file that logs the path of the file in case of an error.
pub fn remove_file(path: &Path) -> Result<(), anyhow::Error> {
    if path.exists() {
        fs::remove_file(path).context(format!("Can't remove file at {}", path.display()))
    } else {
        Ok(())
    }
}
