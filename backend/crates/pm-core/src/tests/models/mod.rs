mod ticket;
mod ticket_status;
