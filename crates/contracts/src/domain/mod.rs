pub mod teknisi;
