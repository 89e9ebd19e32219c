//! Property tests for options encoding and loading.

use proptest::option;
use proptest::prelude::*;

use ovfdeploy::{Network, Options, OptionsError, OptionsFlag, OvfProperty, Property};

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._:/\\-\"\\\\]{0,16}"
}

fn texts() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(text(), 0..4)
}

fn ovf_property() -> impl Strategy<Value = OvfProperty> {
    (text(), text(), option::of(text()), option::of(any::<bool>()), option::of(text())).prop_map(
        |(key, kind, label, password, description)| OvfProperty {
            key,
            kind,
            label,
            password,
            description,
            ..OvfProperty::default()
        },
    )
}

fn property() -> impl Strategy<Value = Property> {
    (text(), text(), option::of(ovf_property())).prop_map(|(key, value, spec)| Property {
        spec,
        ..Property::new(key, value)
    })
}

fn network() -> impl Strategy<Value = Network> {
    (text(), text()).prop_map(|(name, network)| Network::new(name, network))
}

fn options() -> impl Strategy<Value = Options> {
    (
        (texts(), text(), texts(), text(), texts(), text(), texts(), text()),
        (
            proptest::collection::vec(property(), 0..4),
            proptest::collection::vec(network(), 0..4),
            text(),
            any::<(bool, bool, bool)>(),
            option::of(text()),
        ),
    )
        .prop_map(
            |(
                (ado, deployment, adpo, disk, aipo, ip_policy, aipp, ip_protocol),
                (property_mapping, network_mapping, annotation, (power_on, inject, wait), name),
            )| Options {
                all_deployment_options: ado,
                deployment,
                all_disk_provisioning_options: adpo,
                disk_provisioning: disk,
                all_ip_allocation_policy_options: aipo,
                ip_allocation_policy: ip_policy,
                all_ip_protocol_options: aipp,
                ip_protocol,
                property_mapping,
                network_mapping,
                annotation,
                power_on,
                inject_ovf_env: inject,
                wait_for_ip: wait,
                name,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: encoding options and loading them back yields the same value.
    #[test]
    fn property_options_round_trip(options in options()) {
        let payload = options.to_json().unwrap();

        let mut flag = OptionsFlag::new().with_json(payload);
        flag.process().unwrap();

        prop_assert_eq!(flag.into_options(), Some(options));
    }

    /// PROPERTY: two non-empty sources always conflict, whatever they contain.
    #[test]
    fn property_two_sources_always_conflict(
        path in "[a-z]{1,12}",
        json in "(?s).{1,64}",
    ) {
        let mut flag = OptionsFlag::new().with_path(path).with_json(json);

        let err = flag.process().unwrap_err();

        prop_assert!(matches!(err, OptionsError::ConflictingSources));
    }

    /// PROPERTY: loading never panics on arbitrary inline input.
    #[test]
    fn property_process_never_panics(json in "(?s).{0,256}") {
        let _ = OptionsFlag::new().with_json(json).process();
    }
}
