pub mod db;
pub mod subscription {
    pub mod repository;
}
pub mod suggestion {
    pub mod entity;
    pub mod repository;
}
