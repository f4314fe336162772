use std::{
    fs::File,
    path::Path,
    io::{BufReader, ErrorKind},
};

use crate::error::{QuatError, QuatResult};


/// Takes a file path and returns an input file wrapped in a BufReader.
pub fn new_input_file(path: &Path) -> QuatResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::with_capacity(4096, file)),
        Err(err) => {
            match err.kind() {
                ErrorKind::PermissionDenied => {
                    Err(QuatError::AccessDenied(path.to_path_buf()))
                }
                _ => {
                    Err(QuatError::FileOpen(path.to_path_buf(), err))
                }
            }
        }
    }
}

#[test]
fn missing_file_is_open_error() {
    let path = Path::new("definitely/not/here.quat");
    assert!(matches!(new_input_file(path), Err(QuatError::FileOpen(..))));
}
