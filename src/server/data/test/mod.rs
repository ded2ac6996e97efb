mod attendance;
mod authorization;
mod delete;
mod repository;
