pub mod photo_service;
pub mod qr_service;
