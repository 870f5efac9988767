//! End-to-end scenarios for a customer registration service built on
//! commit_relay: validation rejection, the commit-then-publish round trip,
//! reconnect lifecycle, and per-request isolation.


mod isolation;
mod reconnect;
mod registration;
