pub mod http_auth_service;
