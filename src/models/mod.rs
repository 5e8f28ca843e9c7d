mod bundle;
mod pair;
mod token;

pub use bundle::Bundle;
pub use pair::Pair;
pub use token::Token;
