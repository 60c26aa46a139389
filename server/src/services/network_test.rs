use super::*;

const IWCONFIG_SAMPLE: &str = "\
wlan0     IEEE 802.11  ESSID:\"Classroom\"
          Mode:Managed  Frequency:5.18 GHz  Access Point: 3C:37:86:5A:0B:F1
          Bit Rate=433.3 Mb/s   Tx-Power=22 dBm
";

const NETSH_SAMPLE: &str = "\
There is 1 interface on the system:

    Name                   : Wi-Fi
    State                  : connected
    SSID                   : Classroom
    BSSID                  : 3c:37:86:5a:0b:f1
    Network type           : Infrastructure
";

#[test]
fn parses_iwconfig_access_point() {
    assert_eq!(parse_bssid(IWCONFIG_SAMPLE, Platform::Unix).as_deref(), Some("3C:37:86:5A:0B:F1"));
}

#[test]
fn parses_netsh_bssid() {
    assert_eq!(parse_bssid(NETSH_SAMPLE, Platform::Windows).as_deref(), Some("3c:37:86:5a:0b:f1"));
}

#[test]
fn unassociated_interface_has_no_bssid() {
    let output = "wlan0     IEEE 802.11  ESSID:off/any\n          Access Point: Not-Associated\n";
    assert_eq!(parse_bssid(output, Platform::Unix), None);
}

#[test]
fn wrong_platform_format_does_not_match() {
    assert_eq!(parse_bssid(NETSH_SAMPLE, Platform::Unix), None);
    assert_eq!(parse_bssid("", Platform::Windows), None);
}
