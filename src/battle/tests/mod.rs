mod common;

mod test_menus;
