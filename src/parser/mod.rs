mod passes;
mod state;

pub use passes::{
    SchemeParts, parse_fragment, parse_host, parse_path, parse_query, parse_scheme,
    parse_user_info,
};
pub use state::State;
