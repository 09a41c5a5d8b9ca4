pub mod anonymization;
