mod health;
mod helpers;
mod subscription;
