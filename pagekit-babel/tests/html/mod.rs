mod flatten;
mod round_trip;
