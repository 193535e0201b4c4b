pub mod http_geocoding_service;
