pub mod secret_util;
