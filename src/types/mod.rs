pub mod app_state;
pub mod city;
pub mod route_request;
