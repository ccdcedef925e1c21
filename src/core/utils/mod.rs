pub(crate) mod encoding;
