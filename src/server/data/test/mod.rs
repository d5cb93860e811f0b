mod enrollment;
mod user;
