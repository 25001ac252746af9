use std::io;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Could not write report: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
