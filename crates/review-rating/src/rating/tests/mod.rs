mod classification;
mod common;
mod routing;
mod sheet;
