use tandem_model::Tick;

/// Whether the batch behind `tick` is done and observations can be fetched.
///
/// The host must report `finished`; when a campaign is attached, the same
/// snapshot must also show every place submitted.
pub fn is_complete(tick: &Tick) -> bool {
    tick.host.is_finished() && tick.campaign.is_none_or(|c| c.is_filled())
}
