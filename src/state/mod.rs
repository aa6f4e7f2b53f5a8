pub mod controller;
pub mod dataset;
pub mod selection;
pub mod view_model;
