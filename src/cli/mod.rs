mod cmds;
mod output;
mod render;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
