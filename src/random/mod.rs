pub(crate) mod prng;
