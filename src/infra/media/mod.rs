pub mod http_media_service;
