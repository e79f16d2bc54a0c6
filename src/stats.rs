pub(crate) mod duels;
pub(crate) mod match_info;
