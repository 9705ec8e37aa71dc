use crate::constants::header;
use crate::correlator::ExchangeRecord;
use crate::headers::HeaderCollection;
use crate::rules::OriginPolicy;
use crate::util::{complement, intersect, lower_all, split_list};

/// What a rewrite handler decided about one phase of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RewriteOutcome {
    /// Terminal: the host must abort the exchange.
    Cancel,
    /// The header set was mutated and must be resubmitted.
    Modified,
    Untouched,
}

/// Request phase of an OPTIONS preflight. May narrow the requested-headers
/// list; the removed names are recorded on the exchange record so the
/// actual request strips the same headers later.
pub(crate) fn preflight_request(
    record: &mut ExchangeRecord,
    headers: &mut HeaderCollection,
) -> RewriteOutcome {
    if record.rule.origin == Some(OriginPolicy::Block) {
        return RewriteOutcome::Cancel;
    }

    if let Some(requested) = headers.value(header::ACCESS_CONTROL_REQUEST_METHOD)
        && let Some(allowed) = &record.rule.methods
        && !allows_method(allowed, requested)
    {
        return RewriteOutcome::Cancel;
    }

    let mut dirty = strip_origin_disclosure(&record.rule.origin, headers);

    let narrowed = match (
        headers.value(header::ACCESS_CONTROL_REQUEST_HEADERS),
        &record.rule.request_headers,
    ) {
        (Some(value), Some(allowed)) => {
            let requested = lower_all(&split_list(value));
            let kept = intersect(allowed, &requested);
            if kept.len() != requested.len() {
                let omitted = complement(&kept, &requested);
                Some((kept, omitted))
            } else {
                None
            }
        }
        _ => None,
    };
    if let Some((kept, omitted)) = narrowed {
        headers.set(header::ACCESS_CONTROL_REQUEST_HEADERS, kept.join(", "));
        record.acrh_omitted = Some(omitted);
        dirty = true;
    }

    outcome(dirty)
}

/// Request phase of the actual (non-preflight) request. `record` may have
/// been carried over from a correlated preflight.
pub(crate) fn actual_request(
    record: &ExchangeRecord,
    method: &str,
    headers: &mut HeaderCollection,
) -> RewriteOutcome {
    if record.rule.origin == Some(OriginPolicy::Block) {
        return RewriteOutcome::Cancel;
    }

    if let Some(allowed) = &record.rule.methods
        && !allows_method(allowed, method)
    {
        return RewriteOutcome::Cancel;
    }

    let mut dirty = strip_origin_disclosure(&record.rule.origin, headers);

    if let Some(omitted) = &record.acrh_omitted {
        headers.remove_many(omitted);
        dirty = true;
    }

    if record.rule.credentials == Some(false)
        && headers.remove_many(&[header::AUTHORIZATION, header::COOKIE]) > 0
    {
        dirty = true;
    }

    outcome(dirty)
}

pub(crate) fn preflight_response(
    record: &ExchangeRecord,
    headers: &mut HeaderCollection,
) -> RewriteOutcome {
    let mut dirty = apply_common_response(record, headers);

    dirty |= intersect_list_header(
        headers,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        record.rule.methods.as_deref(),
    );
    dirty |= intersect_list_header(
        headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        record.rule.allow_headers.as_deref(),
    );

    outcome(dirty)
}

pub(crate) fn actual_response(
    record: &ExchangeRecord,
    headers: &mut HeaderCollection,
) -> RewriteOutcome {
    outcome(apply_common_response(record, headers))
}

fn apply_common_response(record: &ExchangeRecord, headers: &mut HeaderCollection) -> bool {
    let mut dirty = false;

    match record.rule.origin {
        Some(OriginPolicy::Allow) => {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, record.origin.clone());
            dirty = true;
        }
        Some(OriginPolicy::Star) => {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            dirty = true;
        }
        _ => {}
    }

    dirty |= intersect_list_header(
        headers,
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        record.rule.expose_headers.as_deref(),
    );

    if let Some(credentials) = record.rule.credentials {
        headers.set(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            if credentials { "true" } else { "false" },
        );
        dirty = true;
    }

    dirty
}

/// An `allow` or `star` rule substitutes server-side trust for the
/// browser's origin disclosure, so the outgoing `Origin` header goes away.
fn strip_origin_disclosure(
    policy: &Option<OriginPolicy>,
    headers: &mut HeaderCollection,
) -> bool {
    if matches!(policy, Some(OriginPolicy::Allow | OriginPolicy::Star)) {
        headers.remove(header::ORIGIN);
        true
    } else {
        false
    }
}

/// Replaces a comma-separated header with its intersection against the
/// rule's allowed set. Only a shrinking intersection counts as a mutation;
/// survivors keep the rule side's order and casing.
fn intersect_list_header(
    headers: &mut HeaderCollection,
    name: &str,
    allowed: Option<&[String]>,
) -> bool {
    let Some(allowed) = allowed else {
        return false;
    };
    let Some(value) = headers.value(name).map(str::to_owned) else {
        return false;
    };

    let declared = split_list(&value);
    let kept = intersect(allowed, &declared);
    if kept.len() != declared.len() {
        headers.set(name, kept.join(", "));
        true
    } else {
        false
    }
}

fn allows_method(allowed: &[String], method: &str) -> bool {
    allowed.iter().any(|entry| entry.eq_ignore_ascii_case(method))
}

fn outcome(dirty: bool) -> RewriteOutcome {
    if dirty {
        RewriteOutcome::Modified
    } else {
        RewriteOutcome::Untouched
    }
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod rewrite_test;
