pub mod os_helper;
