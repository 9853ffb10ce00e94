mod list;
mod lookup;
mod show;
