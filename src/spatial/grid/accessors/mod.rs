mod cell_ops;
mod view;
