//! Integration tests for escrow orders funded with CW20 tokens.

use common::AssetInfo;
use cosmwasm_std::{coins, Addr, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, ContractWrapper, Executor};

use escrow::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use escrow::state::{Order, OrderStatus};

fn contract_escrow() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        escrow::contract::execute,
        escrow::contract::instantiate,
        escrow::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let maker = Addr::unchecked("terra1maker");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &maker, coins(1_000_000, "uluna"))
            .unwrap();
    });

    let cw20_code_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Test Token".to_string(),
                symbol: "TST".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: maker.to_string(),
                    amount: Uint128::from(10_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "cw20-test",
            None,
        )
        .unwrap();

    let escrow_code_id = app.store_code(contract_escrow());
    let escrow = app
        .instantiate_contract(
            escrow_code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                router: Some("terra1router".to_string()),
                escrow_fee_bps: 30,
                protocol_fee_bps: 20,
                treasury_escrow: "terra1treasuryescrow".to_string(),
                treasury_protocol: "terra1treasuryprotocol".to_string(),
            },
            &[],
            "xswap-escrow",
            None,
        )
        .unwrap();

    (app, escrow, token, maker)
}

fn token_balance(app: &App, token: &Addr, address: &str) -> u128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

fn create_token_order(token: &Addr, amount: u128) -> ExecuteMsg {
    ExecuteMsg::CreateOrder {
        token_in: AssetInfo::cw20(token.to_string()),
        token_out: AssetInfo::native("uluna"),
        amount_in: Uint128::new(amount),
        min_amount_out: Uint128::zero(),
        dst_eid: 30101,
    }
}

#[test]
fn test_cw20_order_pulls_allowance_and_pays_fees() {
    let (mut app, escrow, token, maker) = setup();

    app.execute_contract(
        maker.clone(),
        token.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: escrow.to_string(),
            amount: Uint128::new(1_000_000),
            expires: None,
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        maker.clone(),
        escrow.clone(),
        &create_token_order(&token, 1_000_000),
        &[],
    )
    .unwrap();

    assert_eq!(token_balance(&app, &token, maker.as_str()), 9_000_000);
    assert_eq!(token_balance(&app, &token, "terra1treasuryescrow"), 3_000);
    assert_eq!(token_balance(&app, &token, "terra1treasuryprotocol"), 2_000);
    assert_eq!(token_balance(&app, &token, escrow.as_str()), 995_000);

    // executed orders release tokens, not native funds
    app.execute_contract(
        Addr::unchecked("terra1router"),
        escrow.clone(),
        &ExecuteMsg::ExecuteFromRemote {
            order_id: 0,
            recipient: "terra1recipient".to_string(),
            extra_min_out: Uint128::zero(),
        },
        &[],
    )
    .unwrap();
    assert_eq!(token_balance(&app, &token, "terra1recipient"), 995_000);

    let order: Order = app
        .wrap()
        .query_wasm_smart(&escrow, &QueryMsg::Order { order_id: 0 })
        .unwrap();
    assert_eq!(order.status, OrderStatus::Executed);
}

#[test]
fn test_cw20_order_without_allowance_fails_atomically() {
    let (mut app, escrow, token, maker) = setup();

    let err = app
        .execute_contract(
            maker.clone(),
            escrow.clone(),
            &create_token_order(&token, 1_000),
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("No allowance"));

    // no order was recorded
    let err = app
        .wrap()
        .query_wasm_smart::<Order>(&escrow, &QueryMsg::Order { order_id: 0 })
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert_eq!(token_balance(&app, &token, maker.as_str()), 10_000_000);
}

#[test]
fn test_cw20_order_rejects_attached_native() {
    let (mut app, escrow, token, maker) = setup();

    let err = app
        .execute_contract(
            maker,
            escrow,
            &create_token_order(&token, 1_000),
            &coins(1_000, "uluna"),
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Native funds attached to a token order"));
}
