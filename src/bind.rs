pub(crate) mod chart;
