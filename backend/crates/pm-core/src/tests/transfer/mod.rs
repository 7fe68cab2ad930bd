mod conflict_resolution;
mod exported_ticket;
mod manifest;
