pub mod db;
pub mod book {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
