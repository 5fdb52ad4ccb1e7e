mod image;
mod new;
mod ops;
mod save_load;
mod shape;
