pub mod Landing;
