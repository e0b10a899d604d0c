mod facebook_sign_in;
mod helpers;
