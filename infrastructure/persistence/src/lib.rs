pub mod db;
pub mod key_value {
    pub mod entity;
    pub mod file;
    pub mod postgres;
}
