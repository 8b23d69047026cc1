use alloy_primitives::{b256, B256};
use containers::{Bytes32, Checkpoint, Height};

pub const fn checkpoint(height: u64, hash: B256) -> Checkpoint {
    Checkpoint {
        height: Height(height),
        hash: Bytes32(hash),
    }
}

/// Trusted anchors for the main network, sorted by height.
///
/// Entries are append-only: new anchors are added at release time for
/// heights the network has long since buried, and existing entries are
/// never edited.
pub static MAINNET_CHECKPOINTS: &[Checkpoint] = &[
    checkpoint(0, b256!("00000a336bf3e2be21c2ce9a3f9bc9849c697475d0de85e201bdc3452f3c343b")),
    checkpoint(10_000, b256!("1cbd7af1430109200bda6ca6a0b94b5771c28819518a201ef96eb0859afca006")),
    checkpoint(20_000, b256!("8ca1f8beca3f6fd966cc83495f367be55ef3460e63abdf692e22e279a47fbe71")),
    checkpoint(32_712, b256!("15682588a31e9064596fc45aa2403558dc62eed296e709e4f577beca1669e788")),
    checkpoint(32_713, b256!("474619e0a58ec88c8e2516f8232064881750e87acac3a416d65b99bd61246968")),
    checkpoint(32_720, b256!("9bef0d350eb6b11bc0e24c611e92e8e4b7806b1c66afae3d30581c7db89512e4")),
    checkpoint(32_750, b256!("4f3dd45d3de3737d60da46cff2d36df0002b97c505cdac6756d2d88561840b63")),
    checkpoint(32_800, b256!("274996cec47b3f3e6cd48c8f0b39c32310dd7ddc8328ae37762be956b9031024")),
    checkpoint(32_900, b256!("fcea99cbf85e66d340b9883fd4a22f3426dc5a27e35b9cbf936d9fae3378002c")),
    checkpoint(33_000, b256!("081cb47222d3e076d4035041547f3d91f8b35526b8087a4e360f1470a8d541da")),
    checkpoint(40_000, b256!("49adb986a856eca96e5af98026f39b30d98d80cacba37ee0bae0ddbf2dbefed9")),
    checkpoint(50_000, b256!("af0b1d395f56afd34d28af1f606378caa5570f942a5746b8de39470e92a2aa52")),
    checkpoint(60_000, b256!("c847e756dbd4d7119106faa675ab3d900c75c1070c69bb91826ed90e89f75052")),
    checkpoint(70_000, b256!("f7ccc8cb7e5b4075e67c1bc0f8b74d165e0642847f9d3492822dbeda3657f8a2")),
    checkpoint(80_000, b256!("d4a98f840a72287ddaff2a57380ca625126b5a34982d5e7d6df085ad2d0ba5f3")),
    checkpoint(98_000, b256!("936bcf68c8c46dab4d1078c430e252ef6372ac419566cfcaa36bcc4a97254520")),
    checkpoint(100_000, b256!("fabdddd41bf7c5e1d30cec912b5d8ece6e6cf4a4af3d55308f27ef2e38bca789")),
    checkpoint(200_000, b256!("4331fd4e2ec75ee16a269934b643c86a00f4243ce35f74eded28026d30b49100")),
    checkpoint(300_000, b256!("7e5c62b6b983a8d03181af44666b19ef88cfec633634413a5dc05cdf9a4cc553")),
    checkpoint(400_000, b256!("1f81d66b9c644af4e99ffbfd64bce1c697a8682071b14545642972a37b8ca0a8")),
    checkpoint(500_000, b256!("a5e8bbbd1b6e49991e1af745e890896eb93a9afd86fe4661dad73b368981681f")),
    checkpoint(600_000, b256!("498c103556a7ff2f3cade8d0194c4d869ecdcf055710835bed64f6af01f1c689")),
    checkpoint(700_000, b256!("bef31c6a7cbf9ed67af047dae9cfa8c81616be4c33c76099e903cc2e157a659f")),
];

/// The test network carries no anchors.
pub static TESTNET_CHECKPOINTS: &[Checkpoint] = &[];
