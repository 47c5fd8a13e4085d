pub mod best_list_service;
pub mod scorer;
pub mod storage;
