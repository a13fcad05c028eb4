pub mod img_ext;
