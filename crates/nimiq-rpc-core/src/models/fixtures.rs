//! JSON shapes shared by the model tests

use serde_json::{json, Value};

pub(crate) fn transaction_json() -> Value {
    json!({
        "hash": "78957b87ab5546e11e9540ce5a37ebbf93a0ebd73c0ce05f137288f30ee9f430",
        "blockHash": "7c5f3d7fbd3e35c3a2c1e0e5dc4a4c0a3f8a3ad3a7b5a4f40a3c2cba0f6b2c3d",
        "blockNumber": 1215,
        "timestamp": 1523412456,
        "confirmations": 151281,
        "transactionIndex": 0,
        "from": "ad25610feb43d75307763d3f010822a757027429",
        "fromAddress": "NQ15 MLJN 23F6 RBSJ 6HUS DKQP J2S0 UEUE 18T1",
        "to": "824aa01033c89595479bab9d8deb0fc7a2bff7a8",
        "toAddress": "NQ94 GH5A 0414 Q4AP AHUT MNEQ RRUF QXHB HJX8",
        "value": 418200,
        "fee": 138,
        "data": null,
        "flags": 0
    })
}

pub(crate) fn block_json(transactions: Value) -> Value {
    json!({
        "number": 61776,
        "hash": "bc3945d22c9f6441409a6e539728534a4fc97859bda87333071fad9dad942786",
        "pow": "000001b5f2f7e0ef69f3e32dd1c2bdc4e88a1b4fd2c0a1f6c7f1d3b0a3c5f6e2",
        "parentHash": "a88bd8d8eb8f2c4e6f5d9ab1b3d1e0e2f9c8b7a6d5e4f3c2b1a0f9e8d7c6b5a4",
        "nonce": 34617,
        "bodyHash": "f09bdbfe1eb6a1f5ec2dca6cf1ee4b1fb6e1ba5fb0f58e91a1fb76a8e7cd8f7d",
        "accountsHash": "d5db2a0d8e9a0b59bc1e4d1c4a2db1f4d3bcbd4c7f6b3e8a1a2f1c9b7a8e5d3c",
        "difficulty": "2655.9079020269",
        "timestamp": 1523727060,
        "confirmations": 4,
        "miner": "b1b2b3b4b5b6b7b8b9b0c1c2c3c4c5c6c7c8c9c0",
        "minerAddress": "NQ67 NQS2 XKJL 5ERV 69H6 1DLQ B4QC A6FY KL9M",
        "extraData": "",
        "size": 3915,
        "transactions": transactions
    })
}
