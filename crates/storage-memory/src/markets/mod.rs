mod repository;

pub use repository::MarketRepository;
