use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ReportSettings {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}
