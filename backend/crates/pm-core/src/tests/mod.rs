mod models;
mod transfer;
