
#[cfg(test)]
mod forward_tests;

#[cfg(test)]
mod predict_client_tests;
