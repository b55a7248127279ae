//! Built-in terminal scripts
//!
//! The default screensaver content: three SOC-analyst terminals running
//! canned incident-response, threat-intel, and honeypot sessions.

use super::{Anchor, Command, Position, Script, TerminalSpec};

/// The default set of decorative terminals.
///
/// Order matters: on medium-width screens only the first two are shown.
pub fn default_terminals() -> Vec<TerminalSpec> {
    vec![soc_lab(), threat_intel(), honeypot()]
}

fn soc_lab() -> TerminalSpec {
    TerminalSpec::new(
        1,
        Position::new(Anchor::TopLeft, 5, 15),
        "analyst@soc-lab:~$",
        Script::new(vec![
            Command::new("tcpdump -i eth0 -n port 445")
                .output(&[
                    "15:32:41.123456 IP 192.168.1.105.445 > 10.0.0.5.38291: Flags [S]",
                    "15:32:41.123501 IP 192.168.1.105.445 > 10.0.0.5.38292: Flags [S]",
                    "[!] SMB brute force detected from 192.168.1.105",
                ])
                .delay_ms(2000)
                .clear(),
            Command::new("python3 isolate_host.py --ip 192.168.1.105")
                .output(&[
                    "[*] Connecting to firewall API...",
                    "[+] Host isolated successfully",
                    "[+] Incident #2024-1337 created",
                ])
                .delay_ms(3000)
                .clear(),
        ]),
    )
}

fn threat_intel() -> TerminalSpec {
    TerminalSpec::new(
        2,
        Position::new(Anchor::BottomRight, 8, 20),
        "analyst@threat-intel:~$",
        Script::new(vec![Command::new("curl -s https://api.threatfeed.io/iocs/latest")
            .output(&[
                "{\"new_iocs\": 847}",
                "{\"critical\": 23}",
                "[*] Updating blocklist...",
            ])
            .delay_ms(2000)
            .clear()]),
    )
}

fn honeypot() -> TerminalSpec {
    TerminalSpec::new(
        3,
        Position::new(Anchor::TopLeft, 3, 60),
        "analyst@honeypot:~$",
        Script::new(vec![Command::new("tail -f /var/log/cowrie/cowrie.json")
            .output(&[
                "{\"eventid\":\"cowrie.login.success\",\"username\":\"admin\"}",
                "{\"eventid\":\"cowrie.session.file_download\",\"url\":\"bot.sh\"}",
                "[*] New malware sample captured",
            ])
            .delay_ms(2500)
            .clear()]),
    )
}
